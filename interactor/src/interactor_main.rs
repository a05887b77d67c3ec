use multiversx_sc_snippets::imports::*;

#[tokio::main]
async fn main() {
    rust_interact::batch_transfer_cli().await;
}
