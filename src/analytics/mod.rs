mod api;
mod data_layer;
mod params;
mod tracks;

pub use api::{Analytics, EventSink, RecordingSink};
pub use data_layer::{DataLayer, DataLayerEntry};
pub use params::{EventParams, ParamValue};
pub(crate) use params::entry;
pub use tracks::TrackEvents;
