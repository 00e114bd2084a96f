mod usage_errors;
