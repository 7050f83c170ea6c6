mod geometry_test;
mod landmarks_test;
