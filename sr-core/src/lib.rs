pub mod entities {
    pub use sr_entities::{
        category::*, comment::*, id::*, password::*, rating::*, streamer::*, time::*, user::*,
    };
}

pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;
