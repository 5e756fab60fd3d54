pub mod prompt;
pub mod rpc;
pub mod wallet;

pub use prompt::BrowserPrompt;
pub use rpc::GlooTransport;
pub use wallet::PhantomWallet;
