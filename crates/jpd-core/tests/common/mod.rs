pub mod patch_server;
