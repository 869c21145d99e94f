pub const POSTGRESQL_USERS_SQL: &str = include_str!("../templates/starter/postgresql/users.sql");
pub const POSTGRESQL_USERS_TABLE_SQL: &str =
    include_str!("../templates/starter/postgresql/001_users_table.sql");
pub const MYSQL_USERS_SQL: &str = include_str!("../templates/starter/mysql/users.sql");
pub const MYSQL_USERS_TABLE_SQL: &str =
    include_str!("../templates/starter/mysql/001_users_table.sql");
pub const SQLITE_USERS_SQL: &str = include_str!("../templates/starter/sqlite/users.sql");
pub const SQLITE_USERS_TABLE_SQL: &str =
    include_str!("../templates/starter/sqlite/001_users_table.sql");
