mod option_source;

pub use option_source::OptionSource;
