//! Routed pages. The platform crate maps its `Route` variants onto these.

mod home;
mod imprint;
mod legal;
mod privacy;

pub use home::Home;
pub use imprint::Imprint;
pub use legal::LegalPage;
pub use privacy::Privacy;
