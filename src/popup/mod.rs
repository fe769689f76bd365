mod controller;
mod providers;
mod surface;
mod timer;

pub use controller::{
    DismissReason, PopupController, PopupPhase, PopupTimer, ReshowPolicy, AUTO_SHOW_DELAY,
    RESHOW_DELAY,
};
pub use providers::{
    provider_by_key, provider_or_default, random_provider, ProviderDescriptor,
    DEFAULT_PROVIDER_KEY, PROVIDERS,
};
pub use surface::{DomPopupSurface, PopupContent, PopupSurface, RecordingSurface};
pub use timer::{TimerHandle, TimerQueue};
