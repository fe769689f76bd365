//! The site's JSON-LD record set and the per-page registry over it.
//!
//! Records are fixed content, built once behind `LazyLock` and shared by
//! reference. `records_for` returns the blocks a page embeds in its head,
//! already rendered, in embedding order.

use std::sync::LazyLock;

use serde_json::Value;

use super::types::*;

const SITE_URL: &str = "https://cancelmyinternet.com";
const SITE_NAME: &str = "CancelMyInternet.com";
const SUPPORT_PHONE: &str = "+1-888-524-0250";
const SUPPORT_EMAIL: &str = "support@cancelmyinternet.com";

pub static ORGANIZATION: LazyLock<Organization> = LazyLock::new(|| Organization {
    context: SCHEMA_CONTEXT,
    schema_type: "Organization",
    name: SITE_NAME,
    alternate_name: "Cancel My Internet",
    url: SITE_URL,
    logo: "https://cancelmyinternet.com/logo.png",
    description: "Independent third-party service providing phone guidance and assistance for canceling internet and cable TV services. Not affiliated with any provider.",
    email: SUPPORT_EMAIL,
    telephone: SUPPORT_PHONE,
    same_as: Vec::new(),
    contact_point: ContactPoint {
        schema_type: "ContactPoint",
        telephone: SUPPORT_PHONE,
        contact_type: "customer service",
        email: SUPPORT_EMAIL,
        available_language: "English",
        hours_available: OpeningHours {
            schema_type: "OpeningHoursSpecification",
            day_of_week: vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
            opens: "09:00",
            closes: "18:00",
        },
    },
});

pub static WEBSITE: LazyLock<WebSite> = LazyLock::new(|| WebSite {
    context: SCHEMA_CONTEXT,
    schema_type: "WebSite",
    name: SITE_NAME,
    url: SITE_URL,
    description: "Independent cancellation assistance for internet and cable TV services",
    publisher: OrganizationRef {
        schema_type: "Organization",
        name: SITE_NAME,
        url: None,
    },
    potential_action: SearchAction {
        schema_type: "SearchAction",
        target: "https://cancelmyinternet.com/?q={search_term_string}",
        query_input: "required name=search_term_string",
    },
});

pub static SERVICE: LazyLock<Service> = LazyLock::new(|| Service {
    context: SCHEMA_CONTEXT,
    schema_type: "Service",
    service_type: "Cancellation Assistance",
    name: "Internet & Cable Cancellation Guidance",
    description: "Independent phone-based guidance service helping consumers cancel their internet and cable TV services. We provide scripts, talking points, and expert tips.",
    provider: OrganizationRef {
        schema_type: "Organization",
        name: SITE_NAME,
        url: Some(SITE_URL),
    },
    area_served: AreaServed {
        schema_type: "Country",
        name: "United States",
    },
    has_offer_catalog: OfferCatalog {
        schema_type: "OfferCatalog",
        name: "Cancellation Services",
        item_list_element: vec![
            offer("Internet Only Cancellation Assistance", "29.99"),
            offer("Bundle Cancellation Assistance (Internet + TV)", "39.99"),
            offer("TV Only Cancellation Assistance", "29.99"),
        ],
    },
});

fn offer(name: &'static str, price: &'static str) -> Offer {
    Offer {
        schema_type: "Offer",
        item_offered: OfferedService {
            schema_type: "Service",
            name,
        },
        price,
        price_currency: "USD",
    }
}

fn question(name: &'static str, text: &'static str) -> Question {
    Question {
        schema_type: "Question",
        name,
        accepted_answer: Answer {
            schema_type: "Answer",
            text,
        },
    }
}

pub static FAQ_PAGE: LazyLock<FaqPage> = LazyLock::new(|| FaqPage {
    context: SCHEMA_CONTEXT,
    schema_type: "FAQPage",
    main_entity: vec![
        question(
            "Is CancelMyInternet.com affiliated with any internet or cable provider?",
            "No. CancelMyInternet.com is an independent third-party service. We are NOT affiliated with, endorsed by, or connected to Verizon, Spectrum, AT&T, Optimum, Xfinity, or any other internet or cable TV provider. We provide guidance and coaching to help you cancel your own service.",
        ),
        question(
            "What does your cancellation assistance service include?",
            "Our service includes phone-based guidance through the cancellation process, custom scripts and talking points for your provider, tips for handling retention offers, a checklist for equipment returns and final billing, and preparation for what to expect on the call. We guide you - you make the actual cancellation call to your provider.",
        ),
        question(
            "How much does the cancellation assistance service cost?",
            "Our pricing is simple and transparent: $29.99 for internet only or TV only cancellation assistance, and $39.99 for bundle (both internet and TV) cancellation assistance. There are no hidden fees. Payment is collected during the consultation.",
        ),
        question(
            "Can you guarantee my service will be cancelled?",
            "No, we cannot guarantee cancellation outcomes. Final decisions rest with your service provider based on your account status, contract terms, and their policies. We provide expert guidance and preparation to help you navigate the process as smoothly as possible.",
        ),
        question(
            "What information do I need to cancel my service?",
            "You'll typically need: your account number (found on your bill), the name on the account, your service address, your account PIN or security verification, and your preferred service end date. We'll help you prepare all of this during our consultation.",
        ),
        question(
            "What is your refund policy?",
            "If we are unable to provide the consultation service as described, you may be eligible for a refund. Refunds are processed within 5-7 business days. Once the consultation is completed, refunds are generally not available as the service has been rendered. Contact support@cancelmyinternet.com for refund inquiries.",
        ),
        question(
            "Do I need to return equipment after canceling?",
            "Most providers require you to return rented equipment (modems, routers, cable boxes, DVRs) within a specific timeframe, usually 14-30 days. Failure to return equipment typically results in charges of $100-$300 per item. We include equipment return guidance in your cancellation checklist.",
        ),
        question(
            "What are your business hours?",
            "Our team is available Monday through Friday, 9:00 AM to 6:00 PM Eastern Time. We are closed on weekends and major US holidays. You can reach us at (888) 524-0250 or support@cancelmyinternet.com.",
        ),
    ],
});

pub static HOW_TO: LazyLock<HowTo> = LazyLock::new(|| HowTo {
    context: SCHEMA_CONTEXT,
    schema_type: "HowTo",
    name: "How to Cancel Your Internet or Cable Service",
    description: "Step-by-step guide to canceling your internet or cable TV service with expert guidance from CancelMyInternet.com",
    total_time: "PT30M",
    step: vec![
        how_to_step(
            1,
            "Submit Your Request",
            "Call us at (888) 524-0250 or contact us online. Share your provider name, service type, and preferred cancellation date.",
        ),
        how_to_step(
            2,
            "Get Your Cancellation Script",
            "We prepare custom talking points for your specific provider, including how to handle retention offers and common objections.",
        ),
        how_to_step(
            3,
            "Make the Cancellation Call",
            "Using our guidance, you call your provider directly and request cancellation. We prepare you for what to expect.",
        ),
        how_to_step(
            4,
            "Confirm and Complete",
            "Get a confirmation number, review your final bill expectations, and follow our equipment return checklist.",
        ),
    ],
});

fn how_to_step(position: u32, name: &'static str, text: &'static str) -> HowToStep {
    HowToStep {
        schema_type: "HowToStep",
        position,
        name,
        text,
        url: format!("{SITE_URL}/how-it-works#step-{position}"),
    }
}

/// Two-level breadcrumb rooted at the homepage, one per inner page.
pub fn breadcrumb(page_name: &'static str, slug: &str) -> BreadcrumbList {
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: vec![
            ListItem {
                schema_type: "ListItem",
                position: 1,
                name: "Home",
                item: format!("{SITE_URL}/"),
            },
            ListItem {
                schema_type: "ListItem",
                position: 2,
                name: page_name,
                item: format!("{SITE_URL}/{slug}"),
            },
        ],
    }
}

fn provider_faq(provider_key: &str) -> Option<FaqPage> {
    let main_entity = match provider_key {
        "verizon" => vec![
            question(
                "What is Verizon's cancellation phone number?",
                "Verizon's customer service number is 1-800-VERIZON (1-800-837-4966). You can also cancel through My Verizon app or online, but phone is often fastest for immediate cancellation. Note: CancelMyInternet.com is NOT Verizon - we provide guidance for your call.",
            ),
            question(
                "Does Verizon Fios have early termination fees?",
                "It depends on your agreement. If you accepted a promotional rate with a 1 or 2-year commitment, you may owe $10-15 for each remaining month. Month-to-month plans have no ETF. Check your last bill or My Verizon for contract status.",
            ),
            question(
                "How long do I have to return Verizon equipment?",
                "Verizon typically gives you 30 days to return equipment after cancellation. We recommend returning within 14 days to be safe. Keep your return receipt for at least 90 days in case of billing disputes.",
            ),
            question(
                "Can I keep my Verizon email address after canceling?",
                "Yes, you can keep your @verizon.net email by signing up for Verizon's free email service. Make sure to set this up BEFORE your service ends.",
            ),
        ],
        "spectrum" => vec![
            question(
                "Does Spectrum have cancellation fees?",
                "No, Spectrum does not have contracts or early termination fees for residential customers. You can cancel anytime without penalty. However, you won't receive a prorated refund for unused days if you cancel mid-billing cycle.",
            ),
            question(
                "How do I avoid Spectrum's retention offers?",
                "Simply be polite but firm. Say 'I appreciate the offer, but my decision is final. Please proceed with the cancellation.' Don't explain your reasons in detail - this gives them more angles to counter.",
            ),
            question(
                "Can I cancel Spectrum online?",
                "No, Spectrum requires you to call 1-833-267-6094 to cancel. This is intentional to give their retention team a chance to keep you. CancelMyInternet.com can prepare you to navigate this call efficiently.",
            ),
            question(
                "What happens to my Spectrum email after canceling?",
                "Spectrum email addresses (@charter.net, @twc.com, etc.) are typically deactivated 60 days after service cancellation. We recommend switching to Gmail, Outlook, or another free email provider before you cancel.",
            ),
        ],
        "att" => vec![
            question(
                "What is AT&T's cancellation fee?",
                "AT&T's early termination fee depends on your agreement type. For 12-month promotional commitments, it's typically $15/month remaining (up to $180 max). Equipment installment plans require paying the remaining balance. Month-to-month customers have no ETF.",
            ),
            question(
                "Can I cancel AT&T Internet but keep wireless?",
                "Yes, AT&T Internet and AT&T Wireless are separate accounts (despite being the same company). Canceling internet won't affect your wireless service, but you may lose any bundle discounts you were receiving.",
            ),
            question(
                "How do I cancel AT&T U-verse TV only?",
                "You can cancel U-verse TV while keeping internet. Call 1-800-288-2020 and specify you only want to cancel TV service. They may offer a reduced TV package or internet-only rate.",
            ),
            question(
                "What's the AT&T cancellation phone number?",
                "The main AT&T customer service number is 1-800-288-2020 for internet/TV. For internet only, you might be directed to 1-800-288-2747. Note: CancelMyInternet.com is NOT AT&T - we provide guidance for your call.",
            ),
        ],
        "xfinity" => vec![
            question(
                "How do I cancel Xfinity internet service?",
                "Call 1-800-XFINITY (1-800-934-6489) and ask for the cancellation department, or visit an Xfinity store in person. Online chat can start the process but usually routes you to a retention call. Note: CancelMyInternet.com is NOT Xfinity - we provide guidance for your call.",
            ),
            question(
                "Does Xfinity charge an early termination fee?",
                "If you signed a 12 or 24-month agreement, Xfinity charges $10 for each month remaining on the contract. No-contract plans can be cancelled without penalty. Check your agreement in the Xfinity app before calling.",
            ),
            question(
                "Where do I return Xfinity equipment?",
                "You can return equipment at any Xfinity store or ship it free through UPS - UPS stores will pack and label it for you with just your account number. Get a receipt either way and keep it for 90 days.",
            ),
        ],
        "optimum" => vec![
            question(
                "How do I cancel Optimum service?",
                "Optimum requires a phone call to 1-866-218-3025 to cancel; there is no online cancellation. Have your account number and PIN ready. Note: CancelMyInternet.com is NOT Optimum - we provide guidance for your call.",
            ),
            question(
                "Does Optimum prorate the final bill?",
                "No. Optimum bills through the end of your billing cycle regardless of the day you cancel, so timing your call just after a cycle starts means paying for a month you won't use. We help you pick the right cancellation date.",
            ),
            question(
                "How long do I have to return Optimum equipment?",
                "Optimum expects rented modems, routers, and cable boxes back within 30 days of cancellation, by mail or at an Optimum store. Unreturned equipment is billed at full replacement cost.",
            ),
        ],
        _ => return None,
    };
    Some(FaqPage {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity,
    })
}

/// The pages of the site, used to look up which records each embeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SitePage {
    Home,
    Faq,
    HowItWorks,
    Pricing,
    About,
    Contact,
    /// Per-provider cancellation page, keyed the same way the popup rotation
    /// keys providers.
    Provider(&'static str),
}

/// Returns the rendered JSON-LD blocks for `page`, in embedding order.
///
/// Homepage carries organization, website, and service records; provider
/// pages carry the service record, their breadcrumb, and a provider FAQ
/// when one exists; every other inner page carries at least its breadcrumb.
pub fn records_for(page: SitePage) -> serde_json::Result<Vec<Value>> {
    let mut records = Vec::new();
    match page {
        SitePage::Home => {
            records.push(serde_json::to_value(&*ORGANIZATION)?);
            records.push(serde_json::to_value(&*WEBSITE)?);
            records.push(serde_json::to_value(&*SERVICE)?);
        }
        SitePage::Faq => {
            records.push(serde_json::to_value(&*FAQ_PAGE)?);
            records.push(serde_json::to_value(breadcrumb("FAQ", "faq"))?);
        }
        SitePage::HowItWorks => {
            records.push(serde_json::to_value(&*HOW_TO)?);
            records.push(serde_json::to_value(breadcrumb(
                "How It Works",
                "how-it-works",
            ))?);
        }
        SitePage::Pricing => {
            records.push(serde_json::to_value(breadcrumb("Pricing", "pricing"))?);
        }
        SitePage::About => {
            records.push(serde_json::to_value(breadcrumb("About", "about"))?);
        }
        SitePage::Contact => {
            records.push(serde_json::to_value(breadcrumb("Contact", "contact"))?);
        }
        SitePage::Provider(key) => {
            let provider = crate::popup::provider_or_default(key);
            records.push(serde_json::to_value(&*SERVICE)?);
            records.push(serde_json::to_value(breadcrumb_for_provider(provider.key))?);
            if let Some(faq) = provider_faq(provider.key) {
                records.push(serde_json::to_value(faq)?);
            }
        }
    }
    Ok(records)
}

fn breadcrumb_for_provider(key: &'static str) -> BreadcrumbList {
    let name = match key {
        "verizon" => "Cancel Verizon",
        "spectrum" => "Cancel Spectrum",
        "xfinity" => "Cancel Xfinity",
        "att" => "Cancel AT&T",
        _ => "Cancel Optimum",
    };
    breadcrumb(name, &format!("cancel-{key}"))
}
