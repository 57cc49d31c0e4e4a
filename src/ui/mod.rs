pub mod shell_page;
