#[cfg(test)]
pub mod test_utils {
    use fee_admin_api::FeeConfig;
    use fee_admin_db::models::fee_config::NewPresetConfig;
    use heapless::String as HeaplessString;
    use uuid::Uuid;

    /// Preset with a name that cannot collide with other tests
    pub fn create_test_preset(prefix: &str) -> NewPresetConfig {
        let name = format!("{prefix} {}", Uuid::new_v4().simple());
        NewPresetConfig {
            name: HeaplessString::try_from(name.as_str()).unwrap(),
            config: FeeConfig {
                commission_percentage: 0.1,
                ..FeeConfig::default()
            },
        }
    }
}
