//! Track library types: records, media references, bundled assets and the
//! built-in seed set.

mod assets;
mod model;
mod seed;

pub use assets::AssetResolver;
pub use model::*;
pub use seed::seed_tracks;
