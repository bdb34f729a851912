//! 카탈로그 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 상품/사용자/카테고리 REST API와
//! Swagger 문서를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use catalog_service_backend::config::ServerConfig;
use catalog_service_backend::core::registry::{Repository, ServiceLocator};
use catalog_service_backend::db::Database;
use catalog_service_backend::docs::ApiDoc;
use catalog_service_backend::errors::json_error_handler;
use catalog_service_backend::repositories::categories::category_repo::CategoryRepository;
use catalog_service_backend::repositories::products::product_repo::ProductRepository;
use catalog_service_backend::repositories::users::user_repo::UserRepository;
use catalog_service_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 카탈로그 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // ServiceLocator에 인프라 컴포넌트 등록
    ServiceLocator::set(database);

    // 모든 리포지토리/서비스 초기화
    ServiceLocator::initialize_all()
        .await
        .expect("서비스 초기화 실패");

    // 데이터 계층 초기화 (인덱스 생성 등)
    initialize_repositories().await;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어와 Swagger UI,
/// 리소스 라우트, 404 기본 핸들러를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API Docs: http://{}/api-docs", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // JSON 본문 파싱 실패를 {"message"} 형태의 400으로 변환
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))

            // Swagger UI (OpenAPI 문서 포함)
            .service(
                SwaggerUi::new("/api-docs/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )

            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web 요청 로그가 함께 출력됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// 연결 실패 시 애플리케이션이 종료됩니다 (복구 불가능한 기동 오류).
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패"),
    );

    info!("✅ MongoDB 연결 성공");

    database
}

/// 리포지토리별 데이터 초기화 작업을 수행합니다
///
/// 사용자 이메일 유니크 인덱스 등, 각 리포지토리의 `init`을 호출합니다.
/// 실패 시 애플리케이션이 종료됩니다.
async fn initialize_repositories() {
    ProductRepository::instance()
        .init()
        .await
        .expect("상품 리포지토리 초기화 실패");
    UserRepository::instance()
        .init()
        .await
        .expect("사용자 리포지토리 초기화 실패");
    CategoryRepository::instance()
        .init()
        .await
        .expect("카테고리 리포지토리 초기화 실패");
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드와의 통신을 위한 CORS 설정을 구성합니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
