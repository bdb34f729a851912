//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 서비스/리포지토리 컴포넌트를 싱글톤으로 관리하는 전역 DI 컨테이너입니다.
//!
//! - **ServiceLocator**: 타입별로 정확히 하나의 인스턴스를 지연 생성하여 보관
//! - **등록 방식**: 각 컴포넌트 모듈이 `inventory::submit!`으로
//!   [`ServiceRegistration`] / [`RepositoryRegistration`]을 제출하면
//!   컴파일 타임에 전역 레지스트리로 수집됩니다
//! - **인프라 컴포넌트**: `Database`처럼 비동기 초기화가 필요한 것은
//!   `main`에서 [`ServiceLocator::set`]으로 직접 등록합니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! // 컴포넌트 모듈에서
//! inventory::submit! {
//!     RepositoryRegistration {
//!         name: "product_repository",
//!         constructor: || Box::new(ProductRepository::create()),
//!     }
//! }
//!
//! // 사용하는 쪽에서
//! let repo = ProductRepository::instance(); // == ServiceLocator::get::<ProductRepository>()
//! ```

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::errors::AppError;
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 서비스가 구현합니다.
pub trait Service: Send + Sync {
    /// 레지스트리에서 서비스를 식별하는 고유 이름
    fn name(&self) -> &str;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// 레지스트리에 등록되는 모든 리포지토리가 구현합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 레지스트리에서 리포지토리를 식별하는 고유 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름
    fn collection_name(&self) -> &str;

    /// 인덱스 생성 등 데이터 액세스 초기화 작업을 수행합니다.
    ///
    /// 애플리케이션 기동 시 `main`에서 리포지토리별로 호출됩니다.
    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// 서비스 등록 정보
///
/// `inventory` 크레이트를 통해 컴파일 타임에 수집되어 전역 레지스트리에 등록됩니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (검색 키로 사용, `*_service` 형태)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용, `Box<Arc<T>>` 반환)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
///
/// ServiceRegistration과 동일한 구조를 가지지만 별도 타입으로 관리됩니다.
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름 (검색 키로 사용, `*_repository` 형태)
    pub name: &'static str,
    /// 인스턴스 생성 함수 (지연 초기화에 사용, `Box<Arc<T>>` 반환)
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 서비스 이름 → 등록정보 매핑 캐시
/// 첫 접근 시 한 번만 구성되며, 이후 O(1) 조회 제공
static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(strip_registration_suffix(registration.name), registration);
    }

    print_cache_initialized("Service", cache.len());
    cache
});

/// 리포지토리 이름 → 등록정보 매핑 캐시
static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> =
    Lazy::new(|| {
        let mut cache = HashMap::new();

        for registration in inventory::iter::<RepositoryRegistration>() {
            cache.insert(strip_registration_suffix(registration.name), registration);
        }

        print_cache_initialized("Repository", cache.len());
        cache
    });

/// 등록 이름에서 `_service` / `_repository` 접미사를 제거하여 정규화합니다.
///
/// `product_repository` → `product` 형태로 변환되어 타입 이름과 매칭됩니다.
fn strip_registration_suffix(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 싱글톤 의존성 주입 컨테이너
///
/// 각 타입당 정확히 하나의 인스턴스를 보장하고, 첫 요청 시점에 생성합니다.
/// `RwLock` 기반으로 동시 접근에 안전하며, 초기화 중인 타입을 추적하여
/// 순환 참조를 조기에 발견합니다.
pub struct ServiceLocator {
    /// 생성된 인스턴스 캐시 (`TypeId` → 인스턴스)
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    /// 현재 초기화 중인 타입들 (순환 참조 방지용)
    initializing: RwLock<HashSet<TypeId>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
            initializing: RwLock::new(HashSet::new()),
        }
    }

    /// 지정된 타입의 싱글톤 인스턴스를 가져옵니다.
    ///
    /// 1. 인스턴스 캐시 확인 (O(1))
    /// 2. 순환 참조 검사 — 초기화 중인 타입 재요청 시 패닉
    /// 3. 타입 이름 분석 (`ProductRepository` → 리포지토리 `product`)
    /// 4. 등록된 생성자 호출 후 캐싱
    ///
    /// # Panics
    ///
    /// 순환 참조가 감지되거나, 등록되지 않은 타입을 요청하거나,
    /// 등록 타입과 요청 타입이 일치하지 않으면 패닉합니다.
    /// 세 경우 모두 코드 배선 오류이므로 기동 시점에 즉시 실패합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        // 이미 생성된 인스턴스 확인
        {
            let instances = LOCATOR.instances.read().unwrap();
            if let Some(instance) = instances.get(&type_id) {
                return instance
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator");
            }
        }

        // 순환 참조 방지
        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            if !initializing.insert(type_id) {
                panic!(
                    "Circular dependency detected: {} is already being initialized",
                    type_name
                );
            }
        }

        let instance = Self::build_instance::<T>(type_name);

        {
            let mut initializing = LOCATOR.initializing.write().unwrap();
            initializing.remove(&type_id);
        }

        instance
    }

    /// 레지스트리에서 생성자를 찾아 인스턴스를 생성하고 캐시에 저장합니다.
    ///
    /// 생성자는 의존성 해결을 위해 재귀적으로 [`ServiceLocator::get`]을
    /// 호출할 수 있으므로, 락을 잡지 않은 상태에서 실행합니다.
    fn build_instance<T: 'static + Send + Sync>(type_name: &str) -> Arc<T> {
        let type_id = TypeId::of::<T>();
        let short_name = extract_clean_type_name(type_name);

        let constructed: Option<Box<dyn Any + Send + Sync>> =
            if let Some(entity) = short_name.strip_suffix("Repository") {
                REPOSITORY_NAME_CACHE
                    .get(&entity.to_lowercase())
                    .map(|registration| (registration.constructor)())
            } else if let Some(entity) = short_name.strip_suffix("Service") {
                SERVICE_NAME_CACHE
                    .get(&entity.to_lowercase())
                    .map(|registration| (registration.constructor)())
            } else {
                None
            };

        let boxed = constructed.unwrap_or_else(|| {
            panic!(
                "Component not found: {}. Register it with inventory::submit! or ServiceLocator::set()",
                type_name
            )
        });

        match boxed.downcast::<Arc<T>>() {
            Ok(arc_instance) => {
                let instance = (*arc_instance).clone();
                let mut instances = LOCATOR.instances.write().unwrap();
                // 다른 스레드가 먼저 생성했다면 그 인스턴스를 사용
                let cached = instances
                    .entry(type_id)
                    .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
                cached
                    .clone()
                    .downcast::<T>()
                    .expect("Type mismatch in ServiceLocator")
            }
            Err(_) => panic!("Type mismatch for component: {}", type_name),
        }
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 비동기 초기화가 필요해서 레지스트리 생성자로 만들 수 없는
    /// 인프라 컴포넌트(`Database` 등)를 `main`에서 수동 등록할 때 사용합니다.
    ///
    /// ```rust,ignore
    /// let database = Arc::new(Database::new().await?);
    /// ServiceLocator::set(database);
    /// ```
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        let clean_name = extract_clean_type_name(std::any::type_name::<T>());

        println!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR.instances.write().unwrap();
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 애플리케이션 시작 시 호출되어 지연 초기화 대신 모든 의존성을
    /// 한 번에 해결합니다. 데이터 계층이 비즈니스 계층보다 먼저 초기화됩니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");

            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");

            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

/// `std::any::type_name`의 전체 모듈 경로에서 타입 이름만 추출합니다.
fn extract_clean_type_name(type_name: &str) -> String {
    match type_name.rfind("::") {
        Some(pos) => type_name[pos + 2..].to_string(),
        None => type_name.to_string(),
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_registration_suffix() {
        assert_eq!(strip_registration_suffix("product_repository"), "product");
        assert_eq!(strip_registration_suffix("user_service"), "user");
        assert_eq!(strip_registration_suffix("plain"), "plain");
    }

    #[test]
    fn test_extract_clean_type_name() {
        assert_eq!(
            extract_clean_type_name("catalog_service_backend::db::Database"),
            "Database"
        );
        assert_eq!(extract_clean_type_name("Database"), "Database");
    }
}
