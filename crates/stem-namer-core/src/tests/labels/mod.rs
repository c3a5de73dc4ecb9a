mod fetch;
mod short_names;
