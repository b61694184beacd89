
use football_test_utils::prelude::*;

use crate::model::club::ClubRequestDto;

fn club_request(name: &str, stadium: &str) -> ClubRequestDto {
    ClubRequestDto {
        name: name.to_string(),
        stadium: stadium.to_string(),
    }
}
