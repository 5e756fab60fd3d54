pub mod connect_button;
pub mod fetch_error;
pub mod gif_form;
pub mod gif_grid;
pub mod header;
pub mod init_account;

pub use connect_button::ConnectWalletButton;
pub use fetch_error::FetchErrorNotice;
pub use gif_form::GifForm;
pub use gif_grid::GifGrid;
pub use header::Header;
pub use init_account::InitializeAccountButton;
