mod helpers;
mod processor_test;
mod provider_test;
