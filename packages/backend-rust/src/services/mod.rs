pub mod ai_client;
