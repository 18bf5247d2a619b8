mod error_location;
mod objects;
mod paginated_response;
