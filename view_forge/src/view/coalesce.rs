/// Override-over-base resolution shared by every view field.
///
/// `Some(v)` wins, `None` falls back to `base`. Never to a zero value.
pub fn coalesce<T>(override_value: Option<T>, base: T) -> T {
    match override_value {
        Some(value) => value,
        None => base,
    }
}
