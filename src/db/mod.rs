//! Database Connection Management Module
//!
//! MongoDB 연결 핸들의 생성과 종료를 담당하는 모듈입니다.
//! 전역 상태 대신 `main`에서 한 번 생성한 [`Database`]를 리포지토리에 명시적으로
//! 전달하고, HTTP 서버가 종료되면 [`Database::shutdown`]으로 정리합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DataConfig;
//! use crate::db::Database;
//!
//! let config = DataConfig::from_env()?;
//! let database = Database::connect(&config).await?;
//! database.spawn_connection_check();
//!
//! let repository = UserRepository::new(&database);
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```

use std::time::Duration;
use actix_web::rt::time::sleep;
use mongodb::{bson::doc, options::ClientOptions, Client};
use log::{info, warn};
use crate::config::{DataConfig, DEFAULT_DATABASE_NAME};
use crate::errors::{AppError, AppResult};

/// 연결 확인 실패 후 다음 `ping`까지 대기 시간
const CONNECTION_RETRY_INTERVAL: Duration = Duration::from_secs(5);

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 커넥션 풀을 관리하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 연결 문자열을 파싱하고 MongoDB 클라이언트를 생성합니다.
    ///
    /// 연결 문자열이 잘못된 경우 즉시 실패합니다. 실제 서버 연결은 드라이버가
    /// 첫 요청 시점에 수립하므로, 연결 여부는 [`Database::spawn_connection_check`]로
    /// 별도로 확인합니다.
    ///
    /// 데이터베이스 이름 우선순위: `DATABASE_NAME` → 연결 문자열의 경로 → `"test"`
    pub async fn connect(config: &DataConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.connection_string)
            .await
            .map_err(|e| AppError::ConfigError(format!("MongoDB 연결 문자열 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (서버 측 로그에서 식별용)
        client_options.app_name = Some("user_crud_service".to_string());

        let database_name = config
            .database_name
            .clone()
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("📡 MongoDB 클라이언트 생성 완료 (database: {})", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// `ping` 명령으로 서버 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 백그라운드에서 연결을 확인하고 결과를 로그로 남깁니다.
    ///
    /// 서버 기동을 막지 않습니다. 연결이 수립되기 전 들어온 요청은
    /// 데이터베이스 에러로 실패합니다.
    pub fn spawn_connection_check(&self) {
        let database = self.clone();

        actix_web::rt::spawn(async move {
            database.wait_until_reachable(CONNECTION_RETRY_INTERVAL).await;
        });
    }

    /// `ping`이 성공할 때까지 `retry_interval` 간격으로 재시도합니다.
    ///
    /// 실패할 때마다 `warn`으로 남기고, 성공하면 시도 횟수를 반환합니다.
    pub async fn wait_until_reachable(&self, retry_interval: Duration) -> u32 {
        let mut attempt = 1;

        loop {
            match self.ping().await {
                Ok(()) => {
                    info!("✅ MongoDB 연결 성공: {} (시도 {}회)", self.database_name, attempt);
                    return attempt;
                }
                Err(e) => warn!(
                    "⚠️ MongoDB 연결 실패 (시도 {}회), {:?} 후 재시도: {}",
                    attempt, retry_interval, e
                ),
            }

            sleep(retry_interval).await;
            attempt += 1;
        }
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users = database.get_database().collection::<User>("users");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// 커넥션 풀을 정리하고 클라이언트를 종료합니다.
    pub async fn shutdown(self) {
        info!("MongoDB 클라이언트 종료 중...");
        self.client.shutdown().await;
    }
}
