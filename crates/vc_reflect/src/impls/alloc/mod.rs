mod boxed;
mod btree_map;
mod btree_set;
mod vec;
mod vec_deque;
