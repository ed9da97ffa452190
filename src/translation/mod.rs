mod gateway;

pub use gateway::TranslationGateway;
