pub mod acceptance_query;
pub mod acceptance_recorder;

#[cfg(test)]
pub(crate) mod test_support;
