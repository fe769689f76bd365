use rand::Rng;

/// Static description of one promoted provider. The set is fixed at
/// authoring time; page markup and the rotation controller both key off
/// `key`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub key: &'static str,
    pub display_name: &'static str,
    pub full_name: &'static str,
    pub tagline: &'static str,
    pub visual_variant: &'static str,
}

pub const PROVIDERS: [ProviderDescriptor; 5] = [
    ProviderDescriptor {
        key: "verizon",
        display_name: "Verizon",
        full_name: "Verizon Fios",
        tagline: "Get expert help canceling your Verizon Fios Internet or TV service.",
        visual_variant: "verizon",
    },
    ProviderDescriptor {
        key: "spectrum",
        display_name: "Spectrum",
        full_name: "Spectrum",
        tagline: "Navigate your Spectrum cancellation with our expert phone guidance.",
        visual_variant: "spectrum",
    },
    ProviderDescriptor {
        key: "xfinity",
        display_name: "Xfinity",
        full_name: "Xfinity / Comcast",
        tagline: "Cancel your Xfinity service hassle-free with our assistance.",
        visual_variant: "xfinity",
    },
    ProviderDescriptor {
        key: "att",
        display_name: "AT&T",
        full_name: "AT&T Internet & U-verse",
        tagline: "Get guidance for canceling your AT&T Internet or U-verse TV.",
        visual_variant: "att",
    },
    ProviderDescriptor {
        key: "optimum",
        display_name: "Optimum",
        full_name: "Optimum",
        tagline: "Cancel your Optimum service smoothly with our expert help.",
        visual_variant: "optimum",
    },
];

pub const DEFAULT_PROVIDER_KEY: &str = "verizon";

pub fn provider_by_key(key: &str) -> Option<&'static ProviderDescriptor> {
    PROVIDERS.iter().find(|provider| provider.key == key)
}

/// Lookup that degrades to the default provider on an unrecognized key.
pub fn provider_or_default(key: &str) -> &'static ProviderDescriptor {
    provider_by_key(key).unwrap_or_else(|| {
        provider_by_key(DEFAULT_PROVIDER_KEY).expect("default provider present")
    })
}

/// Uniform choice over the fixed provider set.
pub fn random_provider<R: Rng + ?Sized>(rng: &mut R) -> &'static ProviderDescriptor {
    &PROVIDERS[rng.gen_range(0..PROVIDERS.len())]
}
