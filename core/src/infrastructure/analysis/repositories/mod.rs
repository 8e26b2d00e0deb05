mod in_memory_saved_analysis_repository;

pub use in_memory_saved_analysis_repository::InMemorySavedAnalysisRepository;
