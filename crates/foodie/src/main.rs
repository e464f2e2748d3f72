//! # Foodie CLI
//!
//! A terminal client for the `foodieapp` library. The binary is intentionally
//! thin: this file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (print.rs)                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  foodieapp::context::RecipeContext                          │
//! │  - Search, filters, saved list, recipe creation             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every invocation opens the context, performs one screen's worth of work,
//! waits for pending writes and exits. Filters are passed as flags because
//! there is no session to keep them in.

mod cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
