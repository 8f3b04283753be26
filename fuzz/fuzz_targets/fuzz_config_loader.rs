#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parse and validation errors are fine; panics are not.
    if let Ok(cfg) = cardboard_config::load_toml(data)
        && cfg.validate().is_ok()
    {
        // Anything that validates must also build.
        let built = cardboard_core::TriggerArbiterBuilder::from_config(&cfg)
            .and_then(|b| b.try_build());
        assert!(built.is_ok(), "validated config failed to build: {data:?}");
    }
});
