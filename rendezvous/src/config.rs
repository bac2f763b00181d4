use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug, Clone)]
#[command(name = "rendezvous", author, version, about = "Room directory and signaling relay")]
pub struct Config {
    /// Address the HTTP/WebSocket listener binds to.
    #[arg(short, long, env = "RENDEZVOUS_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Tracing filter directive, e.g. `info` or `rendezvous_server=debug`.
    #[arg(long, env = "RENDEZVOUS_LOG", default_value = "info")]
    pub log: String,
}
