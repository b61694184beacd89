
use football_test_utils::prelude::*;
