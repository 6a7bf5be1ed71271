mod linked_list_tests;
