use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use bozor_core::{Catalog, ComparisonSet, Listing, SearchQuery};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
struct UpsertListingsRequest {
    listings: Vec<Listing>,
}

#[derive(Serialize)]
struct CatalogInfo {
    listings_count: usize,
}

#[derive(Deserialize)]
struct CompareCheckRequest {
    /// The user's current comparison set, as held client-side
    #[serde(default)]
    set: Vec<Listing>,
    candidate: Listing,
}

#[derive(Serialize)]
struct CompareCheckResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<bozor_core::CompareRejection>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(catalog: Arc<Catalog>, port: u16) -> std::io::Result<()> {
        info!("REST API listening on port {}", port);
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(catalog.clone()))
                .route("/listings", web::get().to(catalog_info))
                .route("/listings", web::put().to(upsert_listings))
                .route("/listings/search", web::post().to(search))
                .route("/listings/recommend", web::post().to(recommend))
                .route("/listings/{id}", web::get().to(get_listing))
                .route("/listings/{id}", web::delete().to(delete_listing))
                .route("/compare/check", web::post().to(compare_check))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn catalog_info(catalog: web::Data<Arc<Catalog>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(CatalogInfo {
        listings_count: catalog.count(),
    }))
}

async fn upsert_listings(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<UpsertListingsRequest>,
) -> ActixResult<HttpResponse> {
    let count = req.listings.len();
    match catalog.upsert_all(req.into_inner().listings) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true,
            "upserted": count
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn get_listing(
    catalog: web::Data<Arc<Catalog>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match catalog.get(&id) {
        Some(listing) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": listing
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Listing not found"
        }))),
    }
}

async fn delete_listing(
    catalog: web::Data<Arc<Catalog>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    if catalog.delete(&id) {
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": true
        })))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Listing not found"
        })))
    }
}

/// General catalog-filter path. Echoes the constraint set that was
/// actually applied so the UI can show what the text was interpreted as.
async fn search(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let outcome = catalog.search(&req);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": outcome.results,
        "constraints": outcome.constraints
    })))
}

/// Recommendation path: top-5 only
async fn recommend(
    catalog: web::Data<Arc<Catalog>>,
    req: web::Json<SearchQuery>,
) -> ActixResult<HttpResponse> {
    let outcome = catalog.search(&SearchQuery {
        text: req.text.clone(),
        constraints: req.constraints.clone(),
        limit: Some(bozor_core::RECOMMEND_LIMIT),
    });
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": outcome.results,
        "constraints": outcome.constraints
    })))
}

/// Gate an add-to-comparison action. The comparison set itself lives
/// client-side; this endpoint only applies the policy.
async fn compare_check(req: web::Json<CompareCheckRequest>) -> ActixResult<HttpResponse> {
    let body = req.into_inner();
    let set = ComparisonSet::from(body.set);
    let response = match set.can_add(&body.candidate) {
        Ok(()) => CompareCheckResponse {
            ok: true,
            reason: None,
        },
        Err(reason) => CompareCheckResponse {
            ok: false,
            reason: Some(reason),
        },
    };
    Ok(HttpResponse::Ok().json(response))
}
