use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{guards, Cfg};
use sr_core::usecases;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Cookie, Status},
        local::blocking::{Client, LocalResponse},
        response::Response,
    };

    pub use super::DummySearchGw;

    pub use sr_core::{entities::*, repositories::*};
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
) -> (rocket::Rocket<rocket::Build>, guards::Connections) {
    let connections = sr_db_sqlite::Connections::init(":memory:", 1).unwrap();
    sr_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = guards::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let rocket = super::rocket_instance(options, db.clone(), Box::new(DummySearchGw));
    (rocket, db)
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, guards::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, Cfg::default(), rocket_cfg);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn register_user(pool: &guards::Connections, name: &str, pw: &str) {
    let db = pool.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::NewUser {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            password: pw.to_string(),
        },
    )
    .unwrap();
}

pub struct DummySearchGw;

use sr_core::gateways::search::{SearchGateway, SearchHit};

impl SearchGateway for DummySearchGw {
    fn run_query(&self, _: &str, _: usize) -> anyhow::Result<Vec<SearchHit>> {
        Ok(vec![])
    }
}
