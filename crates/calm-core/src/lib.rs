pub mod ambience;
pub mod breath;
pub mod bubbles;
pub mod chat;
pub mod config;
pub mod intent;
pub mod session;
pub mod tips;
pub mod waves;

pub use ambience::*;
pub use breath::*;
pub use bubbles::*;
pub use chat::*;
pub use config::*;
pub use intent::*;
pub use session::*;
pub use tips::*;
pub use waves::*;
