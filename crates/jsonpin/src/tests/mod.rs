mod arbitrary;
mod property_position;
mod source_index;
