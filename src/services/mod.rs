/*
 * Responsibility
 * - HTTP に依存しないドメインロジック (services)
 */
pub mod auth;
