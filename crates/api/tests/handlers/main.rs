mod test_utils;

mod availability_test;
mod groups_test;
mod middleware_test;
mod preferences_test;
mod profile_test;
mod summaries_test;
