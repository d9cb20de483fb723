mod sample_data;
mod visibility;
