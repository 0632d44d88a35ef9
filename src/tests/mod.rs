// Test modules for recommender-errors crate
//
// Each source file has a corresponding test file that focuses on business
// logic verification.
