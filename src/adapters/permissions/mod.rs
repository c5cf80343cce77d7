pub mod role_permission_checker;
