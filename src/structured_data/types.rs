use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Organization record carried on the homepage.
#[derive(Clone, Debug, Serialize)]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    #[serde(rename = "alternateName")]
    pub alternate_name: &'static str,
    pub url: &'static str,
    pub logo: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub telephone: &'static str,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<&'static str>,
    #[serde(rename = "contactPoint")]
    pub contact_point: ContactPoint,
}

#[derive(Clone, Debug, Serialize)]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub telephone: &'static str,
    #[serde(rename = "contactType")]
    pub contact_type: &'static str,
    pub email: &'static str,
    #[serde(rename = "availableLanguage")]
    pub available_language: &'static str,
    #[serde(rename = "hoursAvailable")]
    pub hours_available: OpeningHours,
}

#[derive(Clone, Debug, Serialize)]
pub struct OpeningHours {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: Vec<&'static str>,
    pub opens: &'static str,
    pub closes: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub publisher: OrganizationRef,
    #[serde(rename = "potentialAction")]
    pub potential_action: SearchAction,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: &'static str,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

/// Service record shared by the homepage and the provider pages.
#[derive(Clone, Debug, Serialize)]
pub struct Service {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "serviceType")]
    pub service_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub provider: OrganizationRef,
    #[serde(rename = "areaServed")]
    pub area_served: AreaServed,
    #[serde(rename = "hasOfferCatalog")]
    pub has_offer_catalog: OfferCatalog,
}

#[derive(Clone, Debug, Serialize)]
pub struct AreaServed {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct OfferCatalog {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<Offer>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "itemOffered")]
    pub item_offered: OfferedService,
    pub price: &'static str,
    #[serde(rename = "priceCurrency")]
    pub price_currency: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct OfferedService {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
}

/// FAQ page record; `main_entity` keeps the on-page question order.
#[derive(Clone, Debug, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Clone, Debug, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, Serialize)]
pub struct HowTo {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "totalTime")]
    pub total_time: &'static str,
    pub step: Vec<HowToStep>,
}

#[derive(Clone, Debug, Serialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: u32,
    pub name: &'static str,
    pub text: &'static str,
    pub url: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: u32,
    pub name: &'static str,
    pub item: String,
}

/// Renders a record as the pretty-printed JSON-LD body for a
/// `<script type="application/ld+json">` block.
pub fn to_json_ld<T: Serialize>(record: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}
