//! Integration tests for the dashboard API types and client.
//!
//! The fixture tests pin each endpoint's wire shape. For live API tests, set
//! the `DASHBOARD_API_URL` environment variable and run with `--ignored`.

use trading_dashboard::domain::backtesting::wire::{
    CompareResponse, RunResponse, StrategiesResponse, SymbolsResponse,
};
use trading_dashboard::domain::profit_scraping::wire::{
    ControlResponse, RiskAnalysisResponse, SignalsResponse, StatusResponse,
};
use trading_dashboard::domain::stats::wire::{StatsResponse, TradesResponse};
use trading_dashboard::domain::trading::wire::{PositionsResponse, StatusResponse as EngineStatus};
use trading_dashboard::prelude::*;

// =============================================================================
// Wire Shape Tests
// =============================================================================

mod backtesting_types {
    use super::*;

    #[test]
    fn test_strategies_response() {
        let json = r#"{
            "strategies": [
                {"name": "momentum", "description": "Trend following", "parameters": {"lookback": 20}},
                {"name": "mean_reversion"}
            ]
        }"#;
        let resp: StrategiesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.strategies.len(), 2);
        assert_eq!(resp.strategies[0].parameters["lookback"], 20);
        assert!(resp.strategies[1].description.is_empty());
    }

    #[test]
    fn test_symbols_response() {
        let resp: SymbolsResponse =
            serde_json::from_str(r#"{"symbols": ["BTCUSDT", "ETHUSDT"]}"#).unwrap();
        assert_eq!(resp.symbols, ["BTCUSDT", "ETHUSDT"]);
    }

    #[test]
    fn test_run_response_success() {
        let json = r#"{
            "status": "success",
            "data": {
                "strategy": "momentum",
                "symbol": "BTCUSDT",
                "total_return": 0.142,
                "sharpe_ratio": 1.35,
                "max_drawdown": 0.08,
                "win_rate": 0.56,
                "total_trades": 41,
                "final_capital": 11420.0,
                "trades": [
                    {"id": "t-1", "symbol": "BTCUSDT", "side": "buy", "price": 42000.0,
                     "quantity": 0.1, "timestamp": "2024-01-03 09:30:00"}
                ]
            }
        }"#;
        let resp: RunResponse = serde_json::from_str(json).unwrap();
        let result = resp.into_data().unwrap();
        assert_eq!(result.total_trades, 41);
        assert_eq!(result.risk_level(), RiskLevel::Low);
        assert_eq!(result.trades[0].side, Side::Long);
    }

    #[test]
    fn test_run_response_error_detail_reaches_user() {
        let json = r#"{"status": "error", "detail": "No data for symbol XYZ"}"#;
        let resp: RunResponse = serde_json::from_str(json).unwrap();
        let err = resp.into_data().unwrap_err();
        assert_eq!(err.user_message(), "No data for symbol XYZ");
    }

    #[test]
    fn test_compare_response() {
        let json = r#"{
            "status": "success",
            "data": [
                {"strategy": "momentum", "total_return": 0.14, "sharpe_ratio": 1.3},
                {"strategy": "breakout", "total_return": -0.02}
            ]
        }"#;
        let resp: CompareResponse = serde_json::from_str(json).unwrap();
        let rows = resp.into_data().unwrap();
        let view = ComparisonView::project(&rows, &ViewPreferences::default());
        assert_eq!(view.best_by_return.as_deref(), Some("momentum"));
    }
}

mod trading_types {
    use super::*;

    #[test]
    fn test_trading_positions_bare_array() {
        let json = r#"[
            {"symbol": "BTCUSDT", "side": "long", "size": 0.25, "entry_price": 60000.0,
             "current_price": 61200.0, "pnl": 300.0, "pnl_percentage": 2.0,
             "strategy": "momentum", "opened_at": "2024-05-01T08:00:00Z"},
            {"symbol": "ETHUSDT", "side": "SHORT", "quantity": 2, "entry_price": 3100.0,
             "mark_price": 3150.0, "unrealized_pnl": -100.0}
        ]"#;
        let positions: PositionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(positions.len(), 2);
        assert!(positions[0].opened_at.is_some());
        assert_eq!(positions[1].side, Side::Short);

        let snapshot = PositionsSnapshot {
            positions,
            status: None,
        };
        let view = PositionsView::project(&snapshot, &ViewPreferences::default());
        assert_eq!(view.total_pnl, rust_decimal::Decimal::from(200));
    }

    #[test]
    fn test_engine_status_bare_object() {
        let json = r#"{"is_running": true, "mode": "paper", "uptime_seconds": 3600,
                       "active_strategies": ["momentum"]}"#;
        let status: EngineStatus = serde_json::from_str(json).unwrap();
        assert!(status.running);
        assert_eq!(status.mode, "paper");
    }

    #[test]
    fn test_stats_and_trades() {
        let stats: StatsResponse = serde_json::from_str(
            r#"{"total_pnl": 1520.5, "daily_pnl": -20.0, "win_rate": 0.61, "max_drawdown": 0.2}"#,
        )
        .unwrap();
        assert_eq!(RiskLevel::from_drawdown(stats.max_drawdown), RiskLevel::High);

        let trades: TradesResponse = serde_json::from_str(
            r#"[{"id": 9, "symbol": "SOLUSDT", "side": "sell", "price": 150.0, "size": 3,
                 "pnl": 12.0, "executed_at": "2024-05-01T10:00:00.123Z"}]"#,
        )
        .unwrap();
        assert_eq!(trades[0].id, "9");
        assert_eq!(trades[0].quantity, 3.0);
    }
}

mod profit_scraping_types {
    use super::*;

    #[test]
    fn test_status_envelope() {
        let json = r#"{
            "status": "success",
            "data": {"active": true, "symbols": ["BTCUSDT"], "active_positions": 2,
                     "total_profit": 84.2, "trades_today": 7, "win_rate": 0.71}
        }"#;
        let resp: StatusResponse = serde_json::from_str(json).unwrap();
        let status = resp.into_data().unwrap();
        assert!(status.active);
        assert_eq!(status.trades_today, 7);
    }

    #[test]
    fn test_signals_and_risk_envelopes() {
        let signals: SignalsResponse = serde_json::from_str(
            r#"{"status": "success", "data": [
                {"symbol": "BTCUSDT", "direction": "buy", "confidence": 0.86,
                 "entry_price": 61000.0, "target_price": 61610.0, "reason": "breakout"}
            ]}"#,
        )
        .unwrap();
        let signals = signals.into_data().unwrap();
        assert_eq!(signals[0].direction, SignalDirection::Buy);

        let risk: RiskAnalysisResponse = serde_json::from_str(
            r#"{"status": "success", "data": {"current_drawdown": 0.11, "warnings": ["exposure high"]}}"#,
        )
        .unwrap();
        let risk = risk.into_data().unwrap();
        assert_eq!(risk.risk_level(), RiskLevel::Medium);
    }

    #[test]
    fn test_success_without_data_is_malformed() {
        let resp: StatusResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(matches!(
            resp.into_data(),
            Err(HttpError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_control_acknowledgement() {
        let resp: ControlResponse =
            serde_json::from_str(r#"{"status": "started", "message": "Profit scraping started"}"#)
                .unwrap();
        assert!(resp.is_success());
    }
}

// =============================================================================
// Error Normalization
// =============================================================================

mod normalization {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_each_branch() {
        assert_eq!(normalize(&Failure::from(json!("boom"))), "unexpected error: boom");
        assert_eq!(normalize(&Failure::from(json!({"response": {"status": 401}}))), "auth required");
        assert_eq!(normalize(&Failure::from(json!({"response": {"status": 403}}))), "access denied");
        assert_eq!(
            normalize(&Failure::from(json!({"response": {"status": 404}}))),
            "endpoint not found"
        );
        assert_eq!(
            normalize(&Failure::from(json!({"response": {"status": 500}}))),
            "server error: 500"
        );
        assert_eq!(
            normalize(&Failure::from(json!({"response": {"status": 502}}))),
            "server error: 502"
        );
        assert_eq!(
            normalize(&Failure::from(json!({"request": {}}))),
            "no response from server; check connection"
        );
        assert_eq!(
            normalize(&Failure::from(json!({"code": "ECONNABORTED"}))),
            "request timed out"
        );
        assert_eq!(normalize(&Failure::from(json!({"message": "bad input"}))), "bad input");
        assert_eq!(normalize(&Failure::from(json!({}))), "unknown");
    }

    #[test]
    fn test_typed_errors() {
        assert_eq!(HttpError::Timeout.user_message(), "request timed out");
        assert_eq!(
            HttpError::NetworkUnreachable("refused".into()).user_message(),
            "no response from server; check connection"
        );
        assert_eq!(HttpError::from_status(500, String::new()).user_message(), "server error: 500");
    }
}

// =============================================================================
// Live API Tests (require DASHBOARD_API_URL environment variable)
// =============================================================================

mod live {
    use super::*;

    fn get_client() -> Option<DashboardClient> {
        std::env::var("DASHBOARD_API_URL")
            .ok()
            .and_then(|url| DashboardClient::builder().base_url(&url).build().ok())
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_strategies() {
        let Some(client) = get_client() else {
            println!("Skipping live test: DASHBOARD_API_URL not set");
            return;
        };
        let strategies = client.backtesting().strategies().await.unwrap();
        println!("{} strategies", strategies.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_dashboard_cycle() {
        let Some(client) = get_client() else {
            println!("Skipping live test: DASHBOARD_API_URL not set");
            return;
        };
        let snapshot = trading_dashboard::pages::fetch_dashboard(&client).await.unwrap();
        let view = DashboardView::project(&snapshot, &ViewPreferences::default());
        println!("total pnl {} risk {}", view.total_pnl, view.risk_level);
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_positions_poller() {
        let Some(client) = get_client() else {
            println!("Skipping live test: DASHBOARD_API_URL not set");
            return;
        };
        let mut handle = client.watch_positions();
        let state = tokio::time::timeout(std::time::Duration::from_secs(15), async {
            loop {
                let state = handle.changed().await.unwrap();
                if !state.is_loading() {
                    return state;
                }
            }
        })
        .await
        .unwrap();
        assert!(state.snapshot().is_some() || state.error().is_some());
        handle.stop().await;
    }
}
