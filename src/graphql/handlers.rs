use actix_web::{HttpResponse, Responder, web};
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::graphql::schema::AppSchema;

/// Executes a GraphQL request against the shared schema.
pub async fn graphql_handler(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphQL Playground, pointed at `/api/graphql`.
pub async fn graphql_playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/api/graphql")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::schema::create_schema;
    use crate::intake::IntakeStores;
    use actix_web::test;
    use actix_web::{
        App,
        http::{StatusCode, header::ContentType},
        test::{TestRequest, call_service, init_service},
    };
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn test_graphql_handler() {
        let schema = create_schema(IntakeStores::default(), true);

        let app = App::new()
            .app_data(web::Data::new(schema))
            .route("/graphql", web::post().to(graphql_handler));
        let app = init_service(app).await;

        let req = TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": "query { health { status timestamp emailNotifications } }"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let resp_body: Value =
            serde_json::from_slice(&body).expect("Failed to parse response body");
        assert_eq!(resp_body["data"]["health"]["status"], "UP");
        assert_eq!(resp_body["data"]["health"]["emailNotifications"], "enabled");
        assert!(resp_body["data"]["health"]["timestamp"].is_string());

        // Unknown fields still answer 200, with errors in the body
        let req = TestRequest::post()
            .uri("/graphql")
            .insert_header(ContentType::json())
            .set_json(json!({
                "query": "query { invalid_field }"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let resp_body: Value =
            serde_json::from_slice(&body).expect("Failed to parse response body");
        assert!(!resp_body["errors"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_graphql_playground() {
        let app = App::new()
            .service(web::resource("/playground").route(web::get().to(graphql_playground)));
        let app = init_service(app).await;

        let req = TestRequest::get().uri("/playground").to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(content_type, "text/html; charset=utf-8");

        let body_bytes = test::read_body(resp).await;
        let body = std::str::from_utf8(&body_bytes).unwrap();
        assert!(body.contains("GraphQL Playground"));
        assert!(body.contains("/api/graphql"));
    }
}
