//! Handler wrapper: drives the date greeting handler over the host's
//! stdin/stdout invocation protocol.
use edge_fn_sdk::prelude::*;

mod datefmt;
mod handler;

fn main() {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    loop {
        match read_invocation() {
            Ok(inv) => {
                let response = rt.block_on(handler::handle(inv.event, inv.context));
                if let Err(e) = send_response(response) {
                    eprintln!("Failed to send response: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Failed to read invocation: {}", e);
                break;
            }
        }
    }
}
