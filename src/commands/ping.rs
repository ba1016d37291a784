//! Ping the privileged helper

use sysdconf::protocol::{self, Request, Response, SOCKET_PATH};

pub async fn ping() -> Result<(), Box<dyn std::error::Error>> {
    match protocol::call(SOCKET_PATH, &Request::Ping).await {
        Ok(Response::Pong) => {
            println!("pong");
            Ok(())
        }
        Ok(other) => Err(format!("unexpected reply: {:?}", other).into()),
        Err(e) => {
            Err(format!("helper not running: {} (start it with: sudo sysdconf-helper)", e).into())
        }
    }
}
