// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User-facing message strings.
//!
//! The extension's UI language is Japanese; these strings are shown verbatim
//! in the page overlay and in connection diagnostics. Log output stays in
//! English.

/// Server unreachable at the network level.
pub const CONNECTION_FAILED: &str =
    "LM Studioに接続できません。サーバーが起動しているか確認してください。";

/// Request exceeded the 30 second budget.
pub const TIMEOUT: &str = "リクエストがタイムアウトしました。";

/// The server answered with a 5xx status.
pub const MODEL_ERROR: &str = "モデルエラーが発生しました。LM Studioの設定を確認してください。";

/// Catch-all translation failure.
pub const TRANSLATION_FAILED: &str = "翻訳エラーが発生しました";

/// A trigger fired with no selected text.
pub const NO_TEXT_SELECTED: &str =
    "テキストが選択されていません。先にテキストを選択してください。";

/// Prefix for unexpected failures caught at the top of the pipeline.
pub const UNEXPECTED_ERROR_PREFIX: &str = "翻訳中にエラーが発生しました: ";

/// Prefix for connection diagnostics failures.
pub const CONNECTION_TEST_FAILED_PREFIX: &str = "LM Studioに接続できません: ";

/// Connection diagnostics detail when the probe timed out.
pub const CONNECTION_TEST_TIMEOUT: &str = "タイムアウトしました";
