/// A configurable value, together with the bounds of permitted values.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Whether `value` is within the bounds of the option.
    pub fn permits(&self, value: &T) -> bool {
        &self.min <= value && value <= &self.max
    }

    /// Sets the option to `value`, if permitted, returning whether the option was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.permits(&value) {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}
