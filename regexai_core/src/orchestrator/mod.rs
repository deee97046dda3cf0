mod resolver;

pub use resolver::{GenerationSettings, Orchestrator, Resolution, ResolveOptions, SettingsSource};
