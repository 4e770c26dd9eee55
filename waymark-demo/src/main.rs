mod error;
mod manifest;
mod page;

use kv_log_macro as log;

use async_std::{channel, task};
use std::{env, sync::Arc};
use waymark::{
    navigate_event_handler, LinkClick, MemoryEnvironment, NavigationEnvironment, Router,
};

use error::Result;
use manifest::Manifest;
use page::Page;

fn main() -> Result<()> {
    let manifest = match env::args().nth(1) {
        Some(path) => Manifest::load(path)?,
        None => Manifest::default(),
    };

    femme::with_level(manifest.log_level()?);

    task::block_on(browse(manifest))
}

/// Click through the manifest's links, re-rendering whenever the router asks.
async fn browse(manifest: Manifest) -> Result<()> {
    let environment = Arc::new(MemoryEnvironment::new(&manifest.origin)?);
    let mut router = Router::new(manifest.route_definitions());

    let (refresh_sender, refresh_receiver) = channel::unbounded();
    router.start(environment.clone(), move || {
        if let Err(e) = refresh_sender.try_send(()) {
            log::error!("Failed to request refresh: {}", e);
        }
    });

    show(&router, &*environment);

    for href in &manifest.visit {
        let mut click = LinkClick::new(href);
        navigate_event_handler(&*environment, &mut click)?;

        refresh_receiver.recv().await?;
        show(&router, &*environment);
    }

    for _ in 0..manifest.back {
        if !environment.back() {
            break;
        }

        refresh_receiver.recv().await?;
        show(&router, &*environment);
    }

    router.stop();

    Ok(())
}

fn show(router: &Router<Page>, environment: &dyn NavigationEnvironment) {
    let location = environment.current_path();

    match router.resolve(&location) {
        Some(page) => println!("{:<24} {}", location, page),
        None => println!("{:<24} (no content)", location),
    }
}
