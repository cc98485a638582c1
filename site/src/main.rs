use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, App, HttpServer};
use cloud_site::config::SiteConfig;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    let dist = config.dist_dir.clone();
    info!("serving {} on http://{}:{}", dist.display(), config.host, config.port);

    HttpServer::new(move || {
        let index = dist.join("index.html");
        App::new()
            .wrap(Logger::default())
            // ① packaged static assets (see `copy-assets`)
            .service(Files::new("/assets", dist.join("assets")))
            // ② the wasm bundle, with client routes falling back to the SPA shell
            .service(
                Files::new("/", &dist)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
