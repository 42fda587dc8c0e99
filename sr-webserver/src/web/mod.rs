use rocket::{config::Config as RocketCfg, Rocket, Route};

use sr_core::gateways::search::SearchGateway;

mod error;
mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

pub use error::Error;

#[derive(Debug, Clone)]
pub struct Cfg {
    // Cap for hits requested from the external search service.
    pub search_result_limit: usize,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            search_result_limit: 10,
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: guards::Connections,
    search_gw: Box<dyn SearchGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let search_gw = guards::Search(search_gw);

    let mut instance = r.manage(db).manage(search_gw).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(
    db: guards::Connections,
    cfg: Cfg,
    search_gw: Box<dyn SearchGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db, search_gw);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
