#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod observers;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tinycabin_core::SiteConfig;

/// Global site configuration, resolved once from the command line.
/// Stays empty when a configured URL is invalid; the page then renders
/// statically with the contact form degraded.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the resolved site configuration, if startup accepted it.
pub fn site_config() -> Option<&'static SiteConfig> {
    SITE_CONFIG.get()
}

/// Tiny Cabin Creative - studio site
#[derive(Parser, Debug)]
#[command(name = "tinycabin-desktop")]
#[command(about = "Tiny Cabin Creative - design studio site")]
struct Args {
    /// Form endpoint receiving contact submissions (POST, JSON body)
    #[arg(long)]
    form_endpoint: Option<String>,

    /// Scheduling link opened by the "book a call" button
    #[arg(long)]
    scheduling_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    match SiteConfig::from_overrides(args.form_endpoint.as_deref(), args.scheduling_url.as_deref())
    {
        Ok(config) => {
            tracing::info!(
                form_endpoint = %config.form_endpoint,
                scheduling_url = %config.scheduling_url,
                "Tiny Cabin Creative - built with care"
            );
            let _ = SITE_CONFIG.set(config);
        }
        Err(e) => {
            // The page still opens; form submission stays disabled.
            tracing::error!("Site configuration rejected: {e}");
        }
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tiny Cabin Creative")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
