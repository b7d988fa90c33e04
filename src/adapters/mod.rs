pub mod chain;
pub mod feishu;
pub mod neynar;
pub mod notifier;

pub use chain::{AlloyChainClient, ChainClient};
pub use feishu::FeishuNotifier;
pub use neynar::{NeynarNotifier, NEYNAR_CAST_URL};
pub use notifier::Notifier;
