mod records;
mod types;

pub use records::{
    breadcrumb, records_for, SitePage, FAQ_PAGE, HOW_TO, ORGANIZATION, SERVICE, WEBSITE,
};
pub use types::{
    to_json_ld, Answer, AreaServed, BreadcrumbList, ContactPoint, FaqPage, HowTo, HowToStep,
    ListItem, Offer, OfferCatalog, OfferedService, OpeningHours, Organization, OrganizationRef,
    Question, SearchAction, Service, WebSite, SCHEMA_CONTEXT,
};
