mod tests_outcome;
