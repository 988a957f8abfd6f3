//! UseCase 層
//!
//! ドメインモデルとランダムソースを組み合わせて、ユーザー操作に対応する処理を提供します。
//!
//! - `city_directory`: 都市の検索
//! - `weather_sampler`: 天気スナップショットの生成
//! - `chat_session`: 都市ごとのチャットセッション（シミュレーション付き）
//! - `explorer_shell`: 選択状態とオーバーレイを管理するトップレベルのコントローラ

mod chat_session;
mod city_directory;
mod config;
mod error;
mod explorer_shell;
mod weather_sampler;

pub use chat_session::{ChatEvents, ChatSession};
pub use city_directory::CityDirectory;
pub use config::{ActivityConfig, DEFAULT_CHATTER_PROBABILITY, DEFAULT_TICK_PERIOD};
pub use error::{ConfigError, ExplorerError};
pub use explorer_shell::{ExplorerShell, Overlay};
pub use weather_sampler::WeatherSampler;
