mod tests_convert;
