pub trait ConfigProvider: Send + Sync {
    fn length(&self) -> f64;
    fn width(&self) -> f64;
    fn dog_name(&self) -> &str;
    fn dog_age(&self) -> u32;
}
